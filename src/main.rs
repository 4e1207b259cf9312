fn main() {
    govshuttle::app::cli::run();
}
