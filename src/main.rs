use ezview::cli::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        // I/O failures (unreadable config, broken stdin) are internal; the rest is user input
        let is_internal = e.chain().any(|cause| cause.downcast_ref::<std::io::Error>().is_some());
        if is_internal {
            eprintln!("Internal error: {}", e);
            let mut source = e.source();
            if source.is_some() {
                eprintln!("\nCaused by:");
                let mut indent = 1;
                while let Some(err) = source {
                    eprintln!("{:indent$}  {}", "", err);
                    source = err.source();
                    indent += 1;
                }
            }
            std::process::exit(2);
        } else {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
