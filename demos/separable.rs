use perceptron_kit::{cross_entropy, softmax, train_dataset, Dataset, TrainConfig};

fn main() {
    let data = Dataset::toy_separable();
    let config = TrainConfig::new(0.1, 25, 0);

    let model = match train_dataset(&data, &config) {
        Ok(model) => model,
        Err(e) => {
            eprintln!("training failed: {e}");
            return;
        }
    };
    println!("Boundary: W = {:?}, b = {:.4}", model.weights, model.bias);

    let mut probabilities = Vec::new();
    let mut targets = Vec::new();
    for (x, &y) in data.features().iter().zip(data.labels()) {
        let class = model.predict_discrete(x).unwrap_or_default();
        let p = model.predict_sigmoid(x).unwrap_or(f64::NAN);
        println!("Input: {:?} label {} -> step {} sigmoid {:.4}", x, y, class, p);
        probabilities.push(p);
        targets.push(y as f64);
    }

    if let Ok(ce) = cross_entropy(&targets, &probabilities) {
        println!("Cross-entropy of the sigmoid outputs: {ce:.6}");
    }
    println!("softmax([2.0, 1.0, 0.1]) = {:?}", softmax(&[2.0, 1.0, 0.1]));
}
