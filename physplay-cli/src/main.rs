use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use physplay_core::{
    CollisionConfig, CollisionScenario, DriftTracker, GravityConfig, GravityScenario,
    IntegrationMethod, Vec2, DEFAULT_FRAME_DT, DEFAULT_GRAVITY_DT,
};

mod report;

#[derive(Parser)]
#[command(name = "physplay")]
#[command(about = "Headless driver for the 2D physics playground scenarios", long_about = None)]
struct Cli {
    /// Log more (repeat for trace output); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Step the two-body orbit and print its energy
    Gravity {
        #[command(flatten)]
        orbit: OrbitArgs,

        /// Integration method
        #[arg(long, value_enum, default_value_t = MethodArg::Rk4)]
        method: MethodArg,

        /// Print every K-th step
        #[arg(long, default_value_t = 100)]
        report_every: usize,
    },
    /// Run Euler and RK4 from the same orbit and compare energy drift
    Compare {
        #[command(flatten)]
        orbit: OrbitArgs,
    },
    /// Advance the two-circle collision scenario
    Collision {
        /// Number of frames to simulate
        #[arg(long, default_value_t = 180)]
        frames: usize,

        /// Frame duration in seconds
        #[arg(long, default_value_t = DEFAULT_FRAME_DT)]
        dt: f64,

        /// Reset the scenario every K frames (0 = never)
        #[arg(long, default_value_t = 0)]
        reset_every: usize,

        /// Speed of the left circle along x
        #[arg(long, default_value_t = 300.0)]
        speed: f64,

        /// Radius of both circles
        #[arg(long, default_value_t = 20.0)]
        radius: f64,
    },
}

#[derive(Args, Clone, Copy)]
struct OrbitArgs {
    /// Number of steps to run
    #[arg(long, default_value_t = 1000)]
    steps: usize,

    /// Timestep
    #[arg(long, default_value_t = DEFAULT_GRAVITY_DT)]
    dt: f64,

    #[arg(long, default_value_t = 10.0)]
    mass1: f64,

    #[arg(long, default_value_t = 10.0)]
    mass2: f64,

    /// Initial distance between the bodies
    #[arg(long, default_value_t = 200.0)]
    separation: f64,

    /// Gravitational constant
    #[arg(long, default_value_t = 1.0)]
    g: f64,

    /// Relative energy drift above which a warning is logged
    #[arg(long, default_value_t = 0.01)]
    divergence_threshold: f64,
}

impl OrbitArgs {
    fn config(&self, method: IntegrationMethod) -> GravityConfig {
        GravityConfig {
            separation: self.separation,
            mass1: self.mass1,
            mass2: self.mass2,
            g: self.g,
            dt: self.dt,
            method,
            ..GravityConfig::default()
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, ValueEnum)]
enum MethodArg {
    Euler,
    Rk4,
}

impl From<MethodArg> for IntegrationMethod {
    fn from(arg: MethodArg) -> Self {
        match arg {
            MethodArg::Euler => IntegrationMethod::Euler,
            MethodArg::Rk4 => IntegrationMethod::Rk4,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Gravity {
            orbit,
            method,
            report_every,
        } => run_gravity(&orbit, method.into(), report_every),
        Commands::Compare { orbit } => run_compare(&orbit),
        Commands::Collision {
            frames,
            dt,
            reset_every,
            speed,
            radius,
        } => {
            let config = CollisionConfig {
                velocity1: Vec2::new(speed, 0.0),
                radius1: radius,
                radius2: radius,
                ..CollisionConfig::default()
            };
            run_collision(config, frames, dt, reset_every)
        }
    }
}

fn run_gravity(orbit: &OrbitArgs, method: IntegrationMethod, report_every: usize) -> Result<()> {
    let mut scenario = GravityScenario::new(orbit.config(method))?;
    let mut tracker = DriftTracker::new(&scenario.energy());

    println!("Method: {}", scenario.method());
    println!("{}", report::energy_line(0, &scenario.energy()));
    for step in 1..=orbit.steps {
        scenario.step_frame();
        let energy = scenario.energy();
        tracker.record(&energy);
        if report_every > 0 && step % report_every == 0 {
            println!("{}", report::energy_line(step, &energy));
        }
    }

    if tracker.is_diverging(orbit.divergence_threshold) {
        log::warn!(
            "{} energy drift {:.3e} exceeds threshold {:.3e}",
            scenario.method(),
            tracker.max_drift(),
            orbit.divergence_threshold
        );
    }
    println!("{}", report::drift_line(scenario.method(), &tracker));
    println!("simulated time {:.1} over {} steps", scenario.elapsed(), scenario.steps());
    Ok(())
}

fn run_compare(orbit: &OrbitArgs) -> Result<()> {
    for method in IntegrationMethod::ALL {
        let mut scenario = GravityScenario::new(orbit.config(method))?;
        let mut tracker = DriftTracker::new(&scenario.energy());
        for _ in 0..orbit.steps {
            scenario.step_frame();
            tracker.record(&scenario.energy());
        }
        if tracker.is_diverging(orbit.divergence_threshold) {
            log::warn!("{} diverged past {:.3e}", method, orbit.divergence_threshold);
        }
        println!("{}", report::drift_line(method, &tracker));
    }
    Ok(())
}

fn run_collision(config: CollisionConfig, frames: usize, dt: f64, reset_every: usize) -> Result<()> {
    anyhow::ensure!(dt > 0.0 && dt.is_finite(), "frame dt must be positive, got {}", dt);
    let mut scenario = CollisionScenario::new(config)?;

    for frame in 1..=frames {
        if let Some(event) = scenario.advance_with_event(dt) {
            println!("{}", report::collision_line(frame, &event));
        }
        let (c1, c2) = scenario.circles();
        println!("{}", report::velocity_line(frame, &c1, &c2));

        if reset_every > 0 && frame % reset_every == 0 {
            scenario.reset();
            println!("frame {}: reset", frame);
        }
    }
    Ok(())
}
