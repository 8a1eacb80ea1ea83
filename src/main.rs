use clap::Parser;
use rlc_diode::circuit::{IntegratorSettings, SimulationConfig, simulate};
use rlc_diode::output::{ConsoleReport, PlotSink, TrajectorySink};
use rlc_diode::{Float, Method};

/// Transient response of a diode-clamped RLC discharge
#[derive(Parser)]
#[command(name = "rlc-diode", version)]
struct Cli {
    /// Initial capacitor voltage [V]
    #[arg(long, default_value_t = 900.0)]
    v0: Float,

    /// Inductance [H]
    #[arg(long, default_value_t = 11e-6)]
    inductance: Float,

    /// Resistance switched in by the diode [Ω]
    #[arg(long, default_value_t = 85e-3)]
    resistance: Float,

    /// Capacitance [F]
    #[arg(long, default_value_t = 180e-6)]
    capacitance: Float,

    /// Start time [s]
    #[arg(long, default_value_t = 0.0)]
    t0: Float,

    /// End time [s]
    #[arg(long, default_value_t = 400e-6)]
    tf: Float,

    /// Number of output samples
    #[arg(long, default_value_t = 4000)]
    samples: usize,

    /// Integration method (RK45 or RK23)
    #[arg(long, default_value_t = Method::RK45)]
    method: Method,

    /// Relative tolerance
    #[arg(long, default_value_t = 1e-3)]
    rtol: Float,

    /// Absolute tolerance
    #[arg(long, default_value_t = 1e-6)]
    atol: Float,

    /// Plot output file (.png or .svg)
    #[arg(long, default_value = "rlc_diode.png")]
    plot: String,

    /// Skip the plot
    #[arg(long)]
    no_plot: bool,
}

impl Cli {
    fn config(&self) -> SimulationConfig {
        SimulationConfig {
            v0: self.v0,
            l: self.inductance,
            r: self.resistance,
            c: self.capacitance,
            t0: self.t0,
            tf: self.tf,
            num_samples: self.samples,
            solver: IntegratorSettings {
                method: self.method,
                rtol: self.rtol,
                atol: self.atol,
                ..IntegratorSettings::default()
            },
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        tracing::error!(error = %e, "simulation aborted");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> rlc_diode::Result<()> {
    let config = cli.config();
    let simulation = simulate(&config)?;

    if !cli.no_plot {
        PlotSink::new(&cli.plot).consume(&simulation.trajectory)?;
    }
    ConsoleReport::stdout().consume(&simulation.trajectory)?;
    Ok(())
}
