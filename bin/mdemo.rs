use intmatrix::{print, Matrix};

/// A fixed demonstration: multiply a 2x3 matrix by a 3x3 one and show
/// everything involved.
fn main() {
    let a = Matrix::from_rows(vec![vec![0, 9, 8], vec![7, 6, 5]]);
    let b = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);

    let product = match a.from_prod(&b) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    print::print(&a);
    print::print(&b);
    print::print(&product);

    // A 2x3 times a 3x3 is 2x3 again, so this only triggers if the
    // inputs above are ever edited into compatible shapes.
    if product.is_square() {
        match product.determinant() {
            Ok(det) => println!("Determinant: {}", det),
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
}
