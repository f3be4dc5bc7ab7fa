use clap::Parser;
use cloudbase_core::physics::lifting_level;
use cloudbase_core::{Celsius, HectoPascals, HumiditySpec, Level, Measurement, Meters, Percent};

/// Cloud-base calculator for a single surface observation
#[derive(Parser, Debug)]
#[command(name = "cloudbase")]
#[command(about = "Derive cloud-base height from a surface weather observation", long_about = None)]
struct Args {
    /// Air temperature in °C
    #[arg(short, long, default_value_t = 15.0)]
    temperature: f64,

    /// Relative humidity in %
    #[arg(long, default_value_t = 50.0)]
    humidity: f64,

    /// Station pressure in hPa
    #[arg(short, long, default_value_t = 1013.25)]
    pressure: f64,

    /// Humidity reference frame (ambient, liquid, ice)
    #[arg(long, default_value = "ambient")]
    frame: String,

    /// Level to report (lcl, ldl, min)
    #[arg(short, long, default_value = "lcl")]
    level: String,

    /// Station altitude above sea level in meters
    #[arg(long)]
    altitude: Option<f64>,

    /// Report the height in feet instead of meters
    #[arg(long)]
    feet: bool,
}

fn main() {
    let args = Args::parse();

    if !(0.0..=100.0).contains(&args.humidity) {
        eprintln!("humidity must be 0-100%, got {}", args.humidity);
        std::process::exit(2);
    }
    let humidity = Percent::new(args.humidity).to_fraction();

    let spec = match args.frame.as_str() {
        "ambient" => HumiditySpec::ambient(humidity),
        "liquid" => HumiditySpec::liquid(humidity),
        "ice" => HumiditySpec::ice(humidity),
        other => {
            eprintln!("unknown humidity frame '{other}' (expected ambient, liquid or ice)");
            std::process::exit(2);
        }
    };

    let level = match args.level.as_str() {
        "lcl" => Level::Lcl,
        "ldl" => Level::Ldl,
        "min" => Level::MinOfBoth,
        other => {
            eprintln!("unknown level '{other}' (expected lcl, ldl or min)");
            std::process::exit(2);
        }
    };

    let temperature = Celsius::new(args.temperature);
    let pressure = HectoPascals::new(args.pressure).to_pascals();

    let height = match lifting_level(pressure, temperature.to_kelvin(), &spec, level) {
        Ok(height) => height,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    };

    println!("Observation: {temperature}, {} RH ({}), {}", humidity.to_percent(), args.frame, pressure.to_hectopascals());
    if args.feet {
        println!("{} height: {}", args.level.to_uppercase(), height.to_feet());
    } else {
        println!("{} height: {}", args.level.to_uppercase(), height);
    }

    // The dashboard context rows only make sense for ambient sensor humidity
    if args.frame == "ambient" {
        let mut measurement = Measurement::from_raw_fields(temperature, humidity, pressure);
        if let Some(altitude) = args.altitude {
            measurement = measurement.with_altitude(Meters::new(altitude));
        }

        println!("Dewpoint (estimated): {}", measurement.dew_point_or_estimate());
        if let Some(qnh) = measurement.sea_level_pressure_or_estimate() {
            println!("Sea-level pressure: {}", qnh.to_hectopascals());
        }
        println!("Pressure altitude: {}", measurement.pressure_altitude());
    }
}
