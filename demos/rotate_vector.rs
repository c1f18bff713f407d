use planar::vector_model::*;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // direction from one point to another
    let direction = Vector::create_vector_by_two_points((1.0, 1.0), (4.0, 5.0));
    println!("{} length {}", direction, direction.length());

    let unit = direction.normalized()?;
    println!("normalized {}", unit);
    println!("{} degrees from y axis", unit.angle_from_y_axis()?);

    // sweep a quarter turn
    for step in 0..=6 {
        let turned = direction.rotate(step as f64 * 15.0);
        println!(
            "rotated {:>3} -> {} ({} degrees from y axis)",
            step * 15,
            turned,
            turned.angle_from_y_axis()?
        );
    }

    match direction.try_multiply(Point::new(1.0, 0.0)) {
        Ok(product) => println!("{:?}", product),
        Err(err) => eprintln!("{}", err),
    }
    Ok(())
}
