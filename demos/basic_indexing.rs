use hexsphere::{
  cell_area_km2, cell_to_boundary, cell_to_geo, center_child, geo_to_cell, get_base_cell_number, get_resolution,
  is_pentagon, is_valid_cell, parent_at, GeoCoord, GridError,
};

fn main() -> Result<(), GridError> {
  println!("--- Basic indexing ---");

  // San Francisco City Hall
  let point = GeoCoord::from_degrees(37.779265, -122.419277);
  println!("Point: lat {:.6} deg, lng {:.6} deg", point.lat_degrees(), point.lng_degrees());

  let res = 9;
  let cell = geo_to_cell(&point, res)?;
  println!("Cell at res {res}: {cell}");
  assert!(is_valid_cell(cell));

  println!("Resolution: {}", get_resolution(cell));
  println!("Base cell: {}", get_base_cell_number(cell));
  println!("Pentagon: {}", is_pentagon(cell));
  println!("Area: {:.6} km^2", cell_area_km2(cell)?);

  let center = cell_to_geo(cell)?;
  println!("Centre: lat {:.6} deg, lng {:.6} deg", center.lat_degrees(), center.lng_degrees());

  let boundary = cell_to_boundary(cell)?;
  println!("Boundary ({} vertices):", boundary.len());
  for (i, v) in boundary.vertices().iter().enumerate() {
    println!("  {i}: lat {:.6} deg, lng {:.6} deg", v.lat_degrees(), v.lng_degrees());
  }

  println!("\n--- Hierarchy ---");
  let parent = parent_at(cell, 5)?;
  println!("Parent at res 5: {parent}");
  let child = center_child(parent, 7)?;
  println!("Centre child of {parent} at res 7: {child}");

  Ok(())
}
