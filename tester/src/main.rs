use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use toppings::Submission;

const SAMPLE: &[(&str, &[&str])] = &[
    ("1", &["pepperoni", "mushrooms", "onions"]),
    ("2", &["sausage", "mushrooms"]),
    ("1", &["pepperoni", "green peppers"]),
    ("3", &["sausage", "onions"]),
    ("3", &["ham", "pineapple"]),
    ("4", &["sausage", "green peppers"]),
    ("1", &["mushrooms"]),
    ("5", &["sausage", "pepperoni", "onions"]),
    ("2", &["pepperoni", "green peppers", "onions"]),
    ("5", &["sausage", "pepperoni", "mushrooms"]),
];

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Number of sample batches to post
    #[arg(default_value_t = 1)]
    batches: u32,

    /// Base URL of a running server
    #[arg(long, default_value = "http://localhost:1111")]
    url: String,
}

// Each batch replays the sample data under a fresh set of user ids, so
// totals and unique-user counts both keep moving while seeding.
fn sample_batch(batch: u32) -> Vec<Submission> {
    SAMPLE
        .iter()
        .map(|(user, toppings)| Submission {
            user: format!("{user}-{batch}"),
            toppings: toppings.iter().map(|t| t.to_string()).collect(),
        })
        .collect()
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    let client = Client::new();
    let endpoint = format!("{}/toppings/post", args.url);

    let pb = ProgressBar::new(args.batches as u64);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .unwrap()
        .progress_chars("=> "),
    );

    for batch in 0..args.batches {
        pb.set_message(format!("Posting batch {batch}"));

        let response = client
            .post(&endpoint)
            .json(&sample_batch(batch))
            .send()
            .await
            .unwrap();

        assert!(
            response.status().is_success(),
            "Server rejected batch {batch}: {}",
            response.status()
        );

        pb.inc(1);
    }

    pb.finish_with_message("Done");

    let popular: Vec<String> = client
        .get(format!("{}/toppings/most-popular?count=3", args.url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    println!("Posted {} submissions", args.batches as usize * SAMPLE.len());
    println!("Top toppings after next refresh tick: {:?}", popular);
}
