use binc::cli::command;
use structopt::StructOpt;

fn main() -> Result<(), anyhow::Error> {
    command::terminal_init();
    env_logger::init();

    command::compile(command::CommandCompile::from_args())
}
