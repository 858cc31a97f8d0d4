use std::io;

fn main() -> io::Result<()> {
    env_logger::init();

    println!("Monkey front end. One statement per line.");

    monkey::repl::start(io::stdin().lock(), io::stdout())
}
