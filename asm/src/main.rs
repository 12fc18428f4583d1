use color_print::cprintln;
use log::{debug, info};
use sapasm::{util, Error, Image};

const HELP_TEMPLATE: &str = "\
{before-help}{bin} {version}
  {about}

{usage-heading}
{tab}{usage}

{all-args}{after-help}";

#[derive(Debug, clap::Parser)]
#[clap(version, about, help_template = HELP_TEMPLATE)]
struct Args {
    /// Input file
    #[clap(default_value = "main.s")]
    input: String,

    /// Output file
    #[clap(short, long, default_value = "out.hex")]
    output: String,

    /// Dump listing
    #[clap(short, long)]
    dump: bool,
}

fn main() {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args: Args = Args::parse();

    info!("1. Read {}", args.input);
    let source = match read_source(&args.input) {
        Ok(source) => source,
        Err(err) => fail(&err),
    };
    debug!("{} lines", source.len());

    info!("2. Assemble");
    let assembly = match sapasm::assemble_full(&source) {
        Ok(assembly) => assembly,
        Err(diag) => {
            diag.print_diag(&args.input, &source);
            std::process::exit(1);
        }
    };
    debug!(
        "{} records, {} symbols",
        assembly.records.len(),
        assembly.symbols.len()
    );

    if args.dump {
        util::print_dump(&source, &assembly);
    }

    info!("3. Write {}", args.output);
    if let Err(err) = write_image(&args.output, &assembly.image) {
        fail(&err);
    }
}

fn read_source(path: &str) -> Result<Vec<String>, Error> {
    use std::io::BufRead;

    let file = std::fs::File::open(path).map_err(|e| Error::FileOpen(path.to_string(), e))?;
    std::io::BufReader::new(file)
        .lines()
        .map(|line| line.map_err(Error::FileRead))
        .collect()
}

fn write_image(path: &str, image: &Image) -> Result<(), Error> {
    use std::io::Write;

    let mut file =
        std::fs::File::create(path).map_err(|e| Error::FileCreate(path.to_string(), e))?;
    file.write_all(image.to_hex().as_bytes())
        .map_err(|e| Error::FileWrite(path.to_string(), e))
}

fn fail(err: &Error) -> ! {
    cprintln!("<red,bold>error</>: {}", err);
    if let Some(source) = std::error::Error::source(err) {
        cprintln!("  <blue>caused by</>: {}", source);
    }
    std::process::exit(1);
}
