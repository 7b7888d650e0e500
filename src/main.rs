use std::io;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let presenter = noise_explorer::AnsiTerminalPresenter::new(io::stdout());
    let mut controller =
        noise_explorer::InteractiveController::new(stdin.lock(), io::stdout(), presenter);

    controller.run()
}
