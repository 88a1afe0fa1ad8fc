use ticker_sentiment::generate_report;

fn main() {
    env_logger::init();

    let text = "Comment 1:\nNVDA is going to the moon, calls to $150\n---\nComment 2:\nTesla looks weak, buying puts\n---\n";

    let report = generate_report(text).unwrap();

    println!("Report for the given text \"{}\"", text);
    for row in report.rows.iter().filter(|row| row.mention_count > 0) {
        println!(
            "{}: {} mentions, {} ({:.2})",
            row.ticker_symbol, row.mention_count, row.label, row.average_score
        );
    }
}
