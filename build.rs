use dotenvy::dotenv;

fn main() {
  // Tell Cargo that if the env file changes, to rerun this build script.
  println!("cargo::rerun-if-changed=.env");

  dotenv().expect("failed to load .env file");

  if let Ok(url) = std::env::var("API_BASE_URL") {
    println!("cargo::rustc-env=API_BASE_URL={}", url);
  } else {
    panic!("API_BASE_URL must be set at compile time!");
  }
}
