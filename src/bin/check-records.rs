use std::error::Error;
use std::path::PathBuf;
use std::process;

use structopt::StructOpt;

use loader::io::read_records;
use loader::log::{error, info, initialize_logger, o};
use loader::validation::validate;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "check-records",
    about = "Validate a hackathon records file without inserting anything"
)]
struct Opt {
    /// The JSON file containing the records to check
    #[structopt(parse(from_os_str), default_value = "hackathons.json")]
    file: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let opt = Opt::from_args();

    let logger = initialize_logger();

    let hackathons = read_records(&opt.file)?;
    let total = hackathons.len();
    let mut invalid = 0usize;

    for (index, hackathon) in hackathons.iter().enumerate() {
        let logger = logger.new(
            o!("index" => index + 1, "total" => total, "name" => hackathon.display_name().to_string()),
        );

        match validate(hackathon) {
            Ok(()) => info!(logger, "Valid"),
            Err(reason) => {
                invalid += 1;
                error!(logger, "Invalid"; "reason" => %reason);
            }
        }
    }

    info!(logger, "Checked {} record(s), {} invalid", total, invalid);

    if invalid > 0 {
        process::exit(1);
    }

    Ok(())
}
