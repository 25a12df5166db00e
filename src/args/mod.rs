mod cli;


pub use cli::ReportArgs;
