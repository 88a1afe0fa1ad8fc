use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ticker_sentiment::{
    AliasResolver, AliasTable, ContextSentimentAggregator, LexiconPolarityAnalyzer,
    MentionCounter, ReportBuilder, DEFAULT_CONTEXT_SENTIMENT_CONFIG,
};

const THREAD: &str = "Thread Title: Daily Discussion Thread

Comment 1:
NVDA is going to the moon, calls to $150. Earnings next week because guidance was raised.
---
Comment 2:
TSLA puts, very bearish, high risk YOLO. Tesla is overvalued at 400 dollars.
---
Comment 3:
Apple and Microsoft are safe holdings. RSI on AAPL looks stretched though.
---
Comment 4:
Palantir breakout on volume, swing trade into $90. PLTR is the best.
---
";

fn benchmark_generate_report(c: &mut Criterion) {
    let alias_table = AliasTable::from_embedded_csv().expect("Failed to load alias table");
    let alias_resolver = AliasResolver::new(&alias_table).expect("Failed to compile aliases");
    let polarity_analyzer = LexiconPolarityAnalyzer::new();

    c.bench_function("count_mentions", |b| {
        let mention_counter = MentionCounter::new(&alias_resolver);

        b.iter(|| mention_counter.count(black_box(THREAD)))
    });

    c.bench_function("generate_report", |b| {
        let aggregator = ContextSentimentAggregator::new(
            &alias_resolver,
            &polarity_analyzer,
            &DEFAULT_CONTEXT_SENTIMENT_CONFIG,
        );
        let report_builder = ReportBuilder::new();

        b.iter(|| {
            let mention_counts = MentionCounter::new(&alias_resolver).count(black_box(THREAD));
            let ticker_sentiments = aggregator.analyze(black_box(THREAD));

            report_builder.build(&mention_counts, &ticker_sentiments)
        })
    });
}

criterion_group!(benches, benchmark_generate_report);
criterion_main!(benches);
