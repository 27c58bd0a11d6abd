use flagspec::derive::*;
use flagspec::prelude::*;

#[derive(Debug, Flags)]
struct Server {
    #[flag(alias = "-p", help = "The port to listen on.", default = 8080, min = 1024)]
    port: u16,
    #[flag(help = "The interface to bind.", default = "127.0.0.1")]
    host: String,
    #[flag(help = "Log every request.")]
    verbose: bool,
}

fn main() {
    let server = Server::parse();
    println!(
        "Listening on {}:{} (verbose: {}).",
        server.host, server.port, server.verbose
    );
}
