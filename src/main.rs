mod calendar;
mod cli;
mod error;

fn main() {
    cli::run();
}
