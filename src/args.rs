use clap::Parser;

/// Converts a survey CSV export into a formatted document of free-text responses,
/// grouped by case study.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path) The CSV file containing the survey export. The file is expected to have
    /// a header row followed by two non-data rows, which are always skipped.
    #[clap(short, long, value_parser)]
    pub infile: String,

    /// (file path) The location where the report of the survey free-text responses will be
    /// saved.
    #[clap(short, long, value_parser, default_value = "primr18_survey_text.docx")]
    pub outfile: String,

    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
