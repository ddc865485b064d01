use clap::arg;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("grapher")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("grapher")
        .about("grapher builds a link graph of a host domain")
        .arg(arg!([HOST] "The host to crawl, without a scheme (e.g. example.com)"))
        .arg(
            arg!(-w --"workers" <COUNT> "Number of concurrent fetch workers")
                .required(false)
                .value_parser(clap::value_parser!(usize))
                .default_value("100"),
        )
        .arg(
            arg!(-t --"timeout" <SECONDS> "Per-fetch timeout in seconds")
                .required(false)
                .value_parser(clap::value_parser!(u64))
                .default_value("10"),
        )
}
