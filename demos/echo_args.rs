use flagspec::CommandLine;

fn main() {
    let command_line = CommandLine::allow_all().parse();

    for argument in command_line.args().iter() {
        println!("argument: {argument}");
    }

    for (name, value) in command_line.options().as_map() {
        if value.is_empty() {
            println!("option: {name}");
        } else {
            println!("option: {name}={value}");
        }
    }
}
