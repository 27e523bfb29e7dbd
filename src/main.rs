use std::process;

use log::error;
use ndarray::array;

use weft::{Activations, Dense, Weft};

fn main() {
    env_logger::init();

    let input_1 = array![[1.0, 2.0], [3.0, 4.0]];
    let input_2 = array![[3.141, 1.414], [0.0, 42.0]];

    let w = array![[1., -1.], [-1., 2.]];
    let b = array![-2.5, 2.5];

    let res = Dense::new(w, b)
        .map(|dense| Weft::new(dense, Activations::Sigmoid))
        .and_then(|weft| weft.run(&input_1, &input_2));

    match res {
        Ok(res) => println!("{}", res),
        Err(e) => {
            error!("{}", e);
            process::exit(1);
        }
    }
}
