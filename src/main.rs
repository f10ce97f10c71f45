/// Binary entrypoint for the `dashkit` executable.
///
/// Keeps the binary thin: all business logic lives in the `dashkit_lib`
/// crate so unit tests can import library functions directly.
fn main() {
    dashkit_lib::run();
}
