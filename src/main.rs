// main exits with the status of `talka::command`, keeping all logic testable in the library
fn main() {
    talka::init_logging();

    let argv: Vec<String> = std::env::args_os()
        .skip(1)
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    std::process::exit(talka::command(argv));
}
