use seatgrid_rs::{
    CapturePlan, ContainerBounds, ContainerSize, GridPosition, LocationMetadata, SeatGridError,
    progress_bar,
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), SeatGridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("plan") => {
            let output = args.get(1).map(String::as_str).unwrap_or("salen.csv");
            let bounds = ContainerBounds::new(0.0, 60.0, 375.0, 703.125)?;
            let plan = CapturePlan::new(bounds);
            plan.write_csv(output)?;

            let total = plan.len() as u64;
            println!("{}", progress_bar(total, total));
            println!("Wrote {} locations to {}", total, output);
        }
        Some(location) => {
            let position = GridPosition::from_token(location)?;
            let meta = LocationMetadata::new("salen", &position.token());

            println!("{}", meta.title);
            println!("{}", position);
            println!("In bounds: {}", position.is_in_bounds());
        }
        None => {
            let container = ContainerSize::new(375.0, 703.125)?;
            let position = GridPosition::from_pixel(&(120.0, 300.0), &container);

            println!("Token: {}", position.token());
            println!("{}", position);
            println!("Share: {}", position.share_path("http://localhost:9100", "salen"));
        }
    }

    Ok(())
}
