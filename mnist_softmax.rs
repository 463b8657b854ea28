use mnist_softmax::config::{load_config, RunConfig};
use mnist_softmax::data::{Dataset, IMAGE_SIZE};
use mnist_softmax::eval::accuracy;
use mnist_softmax::model::SoftmaxModel;
use mnist_softmax::trainer::training_step;
use mnist_softmax::utils::SimpleRng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::process;
use std::time::Instant;

// Softmax regression (single linear layer) for MNIST.
const NUM_CLASSES: usize = 10;
const TRAIN_IMAGES: &str = "data/train-images-idx3-ubyte";
const TRAIN_LABELS: &str = "data/train-labels-idx1-ubyte";
const TEST_IMAGES: &str = "data/t10k-images-idx3-ubyte";
const TEST_LABELS: &str = "data/t10k-labels-idx1-ubyte";

/// Load the run configuration from the optional first CLI argument.
///
/// With no argument the built-in defaults are used (5000 steps, batch 100,
/// learning rate 0.5, print interval 50).
fn resolve_config() -> RunConfig {
    match std::env::args().nth(1) {
        Some(path) => load_config(&path).unwrap_or_else(|err| {
            eprintln!("Error loading config {}: {}", path, err);
            process::exit(1);
        }),
        None => RunConfig::default(),
    }
}

fn main() {
    let config = resolve_config();

    println!("Loading training data...");
    let load_start = Instant::now();
    let train = Dataset::load(TRAIN_IMAGES, TRAIN_LABELS).unwrap_or_else(|err| {
        eprintln!("Error loading train dataset: {}", err);
        process::exit(1);
    });

    println!("Loading test data...");
    let test = Dataset::load(TEST_IMAGES, TEST_LABELS).unwrap_or_else(|err| {
        eprintln!("Error loading test dataset: {}", err);
        process::exit(1);
    });
    let load_time = load_start.elapsed().as_secs_f64();
    println!("Data loading time: {:.2} seconds", load_time);

    let batches = train.len() / config.batch_size;
    if batches == 0 {
        eprintln!(
            "Batch size {} exceeds training set size {}",
            config.batch_size,
            train.len()
        );
        process::exit(1);
    }

    let mut rng = SimpleRng::new(config.seed.unwrap_or(0));
    if config.seed.is_none() {
        rng.reseed_from_time();
    }
    let mut model = SoftmaxModel::new(NUM_CLASSES, IMAGE_SIZE, &mut rng);

    let mut loss_file = config.loss_file.as_deref().map(|path| {
        let file = File::create(path).unwrap_or_else(|err| {
            eprintln!("Could not open {} for writing training loss: {}", path, err);
            process::exit(1);
        });
        BufWriter::new(file)
    });

    println!("Training softmax classifier...");
    let train_start = Instant::now();

    for step in 0..=config.steps {
        let batch = train.batch(config.batch_size, step % batches);
        let total_loss = training_step(&batch, &mut model, config.learning_rate);
        let test_accuracy = accuracy(&test, &model);
        let average_loss = total_loss / batch.len() as f64;

        if step % config.print_interval == 0 {
            println!(
                "Step {:04}\tAverage Loss: {:.2}\tAccuracy: {:.3}",
                step, average_loss, test_accuracy
            );
        } else {
            print!(
                "Step {:04}\tAverage Loss: {:.2}\tAccuracy: {:.3}\r",
                step, average_loss, test_accuracy
            );
            let _ = io::stdout().flush();
        }

        if let Some(writer) = loss_file.as_mut() {
            writeln!(writer, "{}\t{:.2}", step, average_loss).unwrap_or_else(|err| {
                eprintln!("Failed writing training loss data: {}", err);
                process::exit(1);
            });
        }
    }

    let train_time = train_start.elapsed().as_secs_f64();
    let final_accuracy = accuracy(&test, &model);

    println!("\n=== Performance Summary ===");
    println!("Data loading time: {:.2} seconds", load_time);
    println!("Total training time: {:.2} seconds", train_time);
    println!("Final test accuracy: {:.3}", final_accuracy);
    println!("===========================");
}
