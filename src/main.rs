fn main() {
    showdown_cli::cli::run();
}
