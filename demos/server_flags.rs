use flagspec::{CommandLine, CommandLineSpec, Flag};

fn main() {
    let port: Flag<u16> = Flag::new("--port")
        .alias("-p")
        .help("The port to listen on.")
        .default_value(8080)
        .min(1024);
    let host: Flag<String> = Flag::new("--host")
        .help("The interface to bind.")
        .default_value("127.0.0.1".to_string());
    let verbose: Flag<bool> = Flag::new("--verbose").help("Log every request.");

    let spec = CommandLineSpec::new([
        port.to_arg_spec(),
        host.to_arg_spec(),
        verbose.to_arg_spec(),
    ]);
    let command_line = CommandLine::of(spec).parse();
    let options = command_line.options();

    println!(
        "Listening on {}:{} (verbose: {}).",
        host.get(options).unwrap_or_default(),
        port.get(options).unwrap_or_default(),
        verbose.get(options).unwrap_or_default(),
    );
}
