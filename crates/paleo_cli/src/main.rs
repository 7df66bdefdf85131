use clap::{Parser, Subcommand};
use log::debug;
use paleo_frames::{
    BeddingAttitude, Direction, FrameError, cart2dir, cart2dir_or_zero, dir2cart, doflip,
    parse_cartesian,
};

#[derive(Parser)]
#[command(name = "paleo", about = "Paleomagnetic direction and tilt-correction CLI")]
struct Cli {
    /// Decimal places in printed output
    #[arg(long, global = true, default_value = "6")]
    precision: usize,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Direction to Cartesian (north, east, down)
    Dir2cart {
        /// "dec,inc" or "dec,inc,intensity" in degrees
        #[arg(allow_hyphen_values = true)]
        direction: String,
    },
    /// Cartesian to direction (dec, inc, intensity)
    Cart2dir {
        /// "x,y,z"
        #[arg(allow_hyphen_values = true)]
        vector: String,
        /// Fail on a zero-length vector instead of printing 0,0,0
        #[arg(long)]
        strict: bool,
    },
    /// Tilt-correct a direction for bedding attitude
    Tilt {
        /// Declination in degrees
        #[arg(allow_negative_numbers = true)]
        dec: f64,
        /// Inclination in degrees
        #[arg(allow_negative_numbers = true)]
        inc: f64,
        /// Bedding dip direction in degrees
        #[arg(long, allow_negative_numbers = true)]
        bed_az: f64,
        /// Bedding dip in degrees
        #[arg(long, allow_negative_numbers = true)]
        bed_dip: f64,
    },
    /// Flip a lower-hemisphere direction to the upper hemisphere
    Flip {
        /// Declination in degrees
        #[arg(allow_negative_numbers = true)]
        dec: f64,
        /// Inclination in degrees
        #[arg(allow_negative_numbers = true)]
        inc: f64,
    },
}

fn exit_on_error<T>(result: Result<T, FrameError>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let p = cli.precision;

    match cli.command {
        Commands::Dir2cart { direction } => {
            let d: Direction = exit_on_error(direction.parse());
            debug!("dir2cart input {d:?}");
            let [x, y, z] = dir2cart(&d);
            println!("{x:.p$} {y:.p$} {z:.p$}");
        }

        Commands::Cart2dir { vector, strict } => {
            let xyz = exit_on_error(parse_cartesian(&vector));
            let d = if strict {
                exit_on_error(cart2dir(&xyz))
            } else {
                cart2dir_or_zero(&xyz)
            };
            println!("{:.p$} {:.p$} {:.p$}", d.dec_deg, d.inc_deg, d.intensity);
        }

        Commands::Tilt {
            dec,
            inc,
            bed_az,
            bed_dip,
        } => {
            let bed = BeddingAttitude::new(bed_az, bed_dip);
            debug!("tilt ({dec}, {inc}) against {bed:?}");
            let (dec, inc) = bed.tilt(dec, inc);
            println!("{dec:.p$} {inc:.p$}");
        }

        Commands::Flip { dec, inc } => {
            let (dec, inc) = doflip(dec, inc);
            println!("{dec:.p$} {inc:.p$}");
        }
    }
}
