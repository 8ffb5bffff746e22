//! Example demonstrating error handling with the multinomial Naive Bayes classifier.
//!
//! Each failure mode is reported through `NbError` rather than a panic.

use naive_bayes::{MultinomialNb, NbError};
use ndarray::array;
use shelfcast_helpers::DataPoint;

fn main() {
    println!("Multinomial Naive Bayes Error Handling Examples");
    println!("===============================================");

    println!("\n1. Handling an empty training set:");
    let empty: Vec<DataPoint<&str, f64>> = vec![];
    match MultinomialNb::fit(&empty, 1.0) {
        Ok(_) => println!("   Classifier created successfully"),
        Err(NbError::EmptyDataSet) => println!("   ✓ Caught expected error: {}", NbError::EmptyDataSet),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    println!("\n2. Handling negative smoothing:");
    let training_data = vec![
        DataPoint::new(array![2.0, 0.0], "hot"),
        DataPoint::new(array![0.0, 2.0], "cold"),
    ];
    match MultinomialNb::fit(&training_data, -0.5) {
        Ok(_) => println!("   Classifier created successfully"),
        Err(e @ NbError::InvalidAlpha) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    println!("\n3. Predicting with the wrong number of features:");
    match MultinomialNb::fit(&training_data, 1.0) {
        Ok(model) => match model.predict(array![1.0, 0.0, 0.0].view()) {
            Ok(label) => println!("   Predicted label: {}", label),
            Err(e @ NbError::DimensionMismatch { .. }) => {
                println!("   ✓ Caught expected error: {}", e)
            }
            Err(e) => println!("   ✗ Unexpected error: {}", e),
        },
        Err(e) => println!("   ✗ Failed to create classifier: {}", e),
    }

    println!("\n4. Error propagation in functions:");

    fn classify_with_error_handling() -> Result<String, NbError> {
        let training_data = vec![
            DataPoint::new(array![3.0, 0.0], "hot"),
            DataPoint::new(array![0.0, 3.0], "cold"),
        ];
        let model = MultinomialNb::fit(&training_data, 1.0)?;
        let label = model.predict(array![1.0, 0.2].view())?;
        Ok(label.to_string())
    }

    match classify_with_error_handling() {
        Ok(result) => println!("   ✓ Classification result: {}", result),
        Err(e) => println!("   ✗ Classification failed: {}", e),
    }

    println!("\nAll examples completed successfully!");
}
