use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use shopfeed_feed::{FeedBuilder, FeedConfig};
use shopfeed_products::{Availability, Money, Product, ShippingRule, TaxRule};

/// A product with the fields a typical apparel listing carries.
fn sample_product(i: usize) -> Product {
    let mut product = Product::new(format!("sku-{i}"));
    product.set_title(format!("T-shirt <{i}> & friends"));
    product.set_description("Organic cotton, regular fit.");
    product.set_link(format!("https://shop.example/p/{i}"));
    product.set_availability(Availability::InStock);
    product.set_price(Money::new(19.99, "USD"));
    product.set_gtin(format!("{i:014}"));
    product.set_shipping(vec![
        ShippingRule::new().with_country("US").with_price(Money::new(4.95, "USD")),
        ShippingRule::new().with_country("CA").with_price(Money::new(9.95, "USD")),
    ]);
    product.set_tax(TaxRule::new().with_country("US").with_region("CA").with_rate(7.25));
    product
}

fn filled_builder(n: usize) -> FeedBuilder {
    let mut builder = FeedBuilder::new(FeedConfig::default().with_indent(None));
    builder.extend((0..n).map(sample_product)).unwrap();
    builder
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_build");
    for n in [10usize, 100, 1_000] {
        let builder = filled_builder(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("build", n), &builder, |b, builder| {
            b.iter(|| black_box(builder.build().unwrap()))
        });
    }
    group.finish();
}

fn bench_render_xml(c: &mut Criterion) {
    let mut group = c.benchmark_group("feed_render");
    for n in [10usize, 100, 1_000] {
        let doc = filled_builder(n).build().unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("to_xml", n), &doc, |b, doc| {
            b.iter(|| black_box(doc.to_xml().unwrap()))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_render_xml);
criterion_main!(benches);
