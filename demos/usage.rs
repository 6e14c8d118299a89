use proptable::*;

fn main() -> Result<(), FormulaError> {
    println!("A simple example!");

    let (a, b, c) = (Expr::proposition("A"), Expr::proposition("B"), Expr::proposition("C"));
    let e = Expr::binary(Operator::Implies, Expr::binary(Operator::Or, a, !&b), Expr::binary(Operator::And, b, c));
    println!("Basic expression: {}", &e);
    println!("LaTeX: {}", LATEX_NOTATION.render_delimited(&e));

    let formula = Formula::parse("!(a && b) <-> !a || !b")?;
    println!("Parsed formula: {}", &formula);
    for operation in formula.operations(&PLAIN_NOTATION) {
        println!("  {}", operation);
    }

    println!("{}", formula.truth_table()?);
    Ok(())
}
