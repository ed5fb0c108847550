pub fn app<'a, 'b>() -> clap::App<'a, 'b> {
    clap::App::new("fsnav")
        .version(clap::crate_version!())
        .about("Browse and query an in-memory file system index")
        .arg(clap::Arg::from_usage("-d --debug 'Enable debug output'"))
        .arg(clap::Arg::from_usage(
            "-s --sample 'Load the sample directories and files before reading commands'",
        ))
        .arg(clap::Arg::from_usage(
            "--json 'Print query results and statistics as JSON'",
        ))
        .arg(clap::Arg::from_usage(
            "-q --quiet 'Do not print the banner or the prompt'",
        ))
        .arg(clap::Arg::from_usage(
            "--default-size [bytes] 'Size given to files created without one (default 1024)'",
        ))
        .arg(clap::Arg::from_usage(
            "--script [file] 'Read commands from a file instead of stdin'",
        ))
}

pub fn parse_flags<'a>() -> clap::ArgMatches<'a> {
    app().get_matches()
}
