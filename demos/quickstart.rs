use posixct::Datetime;

fn main() {
    let now = Datetime::now();
    let launch = Datetime::parse("2009-02-13 23:31:30.5").expect("valid timestamp");
    let tomorrow = launch + 86_400.0;

    println!("now:      {now}");
    println!("launch:   {launch} (weekday {:?})", launch.weekday());
    println!("tomorrow: {tomorrow}");
    println!("elapsed since launch: {} s", now - launch);
    println!("missing:  {}", Datetime::new(f64::NAN));
}
