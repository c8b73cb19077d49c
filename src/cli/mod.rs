mod args;

pub use args::{
    CliArgs, CommandKind, CompletionsArgs, ConfigArgs, InitArgs, OutputFlags, PagerArgs,
    build_cli, parse_from,
};

pub fn parse() -> CliArgs {
    args::parse_args()
}
