use clap::{Args, Subcommand};
use connectors::file::csv::settings::CsvFormatOptions;

#[derive(Subcommand)]
pub enum Commands {
    /// Create a table from a record description and load a CSV file into it
    Load {
        #[arg(long, help = "JSON record description file")]
        schema: String,

        #[arg(long, help = "CSV file to load")]
        csv: String,

        #[arg(long, help = "SQLite database file, created if missing")]
        db: String,

        #[arg(long, help = "Table name, defaults to the record name")]
        table: Option<String>,

        #[command(flatten)]
        format: FormatArgs,
    },
    /// Print the DDL generated for a record description
    Ddl {
        #[arg(long, help = "JSON record description file")]
        schema: String,

        #[arg(long, help = "Table name, defaults to the record name")]
        table: Option<String>,
    },
}

/// CSV format flags. Each one set on the command line overrides the schema
/// file's `format` block.
#[derive(Args, Debug, Default)]
pub struct FormatArgs {
    #[arg(long, help = "Field delimiter")]
    pub delimiter: Option<char>,

    #[arg(long, help = "Lines starting with this character are ignored")]
    pub comment: Option<char>,

    #[arg(long, help = "Skip the first record")]
    pub header: bool,

    #[arg(long, help = "Strip leading whitespace from every field")]
    pub trim_leading_space: bool,

    #[arg(long, help = "Keep stray quotes as literal text")]
    pub lazy_quotes: bool,
}

impl FormatArgs {
    pub fn apply(&self, mut options: CsvFormatOptions) -> CsvFormatOptions {
        if let Some(delimiter) = self.delimiter {
            options = options.with_delimiter(delimiter);
        }
        if let Some(comment) = self.comment {
            options = options.with_comment(comment);
        }
        if self.header {
            options = options.with_header(true);
        }
        if self.trim_leading_space {
            options = options.with_trim_leading_space(true);
        }
        if self.lazy_quotes {
            options = options.with_lazy_quotes(true);
        }
        options
    }
}
