use clap::Parser;

/// This is a summary program for simulated election forecasts.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The file containing the simulation draws, in the long or the wide layout.
    /// For more information about the layouts, read the documentation of the seat_forecast crate.
    #[clap(short, long, value_parser)]
    pub input: String,

    /// (json or csv, optional) The type of the input. If not provided, it is guessed from
    /// the extension of the input file (csv by default).
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (file path, optional) The JSON file with the blocs, the majority threshold and the
    /// statistics to compute. If not provided, the default blocs are used.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the summary of the forecast will be written
    /// in JSON format to the given location. It is printed on the standard output otherwise.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference file containing a summary in JSON format. If provided, seatcast
    /// will check that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// If passed as an argument, draws in the long layout are converted to the wide layout
    /// so that the most-seats and bloc comparison statistics can be computed.
    #[clap(long, takes_value = false)]
    pub pivot_wide: bool,

    /// If passed as an argument, the seats of every bloc in every draw are included in the summary.
    #[clap(long, takes_value = false)]
    pub bloc_seats: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
