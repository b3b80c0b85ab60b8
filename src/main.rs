fn main() {
    move_validator::protocol::run_loop();
}
