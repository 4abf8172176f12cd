use clap::Parser;
use intmatrix::{print, Int, Matrix};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Prints a 3x3 integer matrix and its determinant", long_about = None)]
struct Inputs {
    /// The nine elements of the matrix, row by row
    #[arg(value_name = "INT", num_args = 0.., allow_negative_numbers = true)]
    pub values: Vec<Int>,
}

fn main() {
    let inputs = Inputs::parse();

    // Keep the historical behaviour: a wrong count is a usage error
    // with exit status 1.
    if inputs.values.len() != 9 {
        eprintln!("Usage: mdet <a11> <a12> <a13> <a21> <a22> <a23> <a31> <a32> <a33>");
        std::process::exit(1);
    }

    let matrix = Matrix::from_data(3, 3, inputs.values);
    print::print(&matrix);

    match matrix.determinant() {
        Ok(det) => println!("Determinant: {}", det),
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_negative_elements() {
        // A leading hyphen is a sign here, not a flag
        let inputs =
            Inputs::try_parse_from(["mdet", "1", "2", "3", "4", "5", "-6", "7", "8", "9"]).unwrap();
        assert_eq!(inputs.values, vec![1, 2, 3, 4, 5, -6, 7, 8, 9]);

        let inputs = Inputs::try_parse_from(["mdet", "-1", "-2", "-3"]).unwrap();
        assert_eq!(inputs.values, vec![-1, -2, -3]);
    }
}
