use std::path::PathBuf;

use clap::Args;

use crate::error::Result;
use crate::parser::{description, first_line};

use super::read_input;

/// Print the description or first line of a comment
#[derive(Args, Debug)]
pub struct DescribeArgs {
    /// File holding the comment (reads stdin when omitted or `-`)
    pub file: Option<PathBuf>,

    /// Print only the first content line
    #[arg(long)]
    pub first_line: bool,
}

pub fn run(args: DescribeArgs) -> Result<()> {
    let comment = read_input(args.file.as_deref())?;

    let text = if args.first_line {
        first_line(&comment)
    } else {
        description(&comment)
    };

    println!("{}", text);
    Ok(())
}
