use criterion::{Criterion, criterion_group, criterion_main};
use geotag_map::coords::structs::{Rational, TagValue};
use geotag_map::{GeotagMapper, RawGpsMetadata};
use std::hint::black_box;

fn dms(degrees: u32, minutes: u32, centiseconds: u32) -> TagValue {
    TagValue::Rationals(vec![
        Rational::new(degrees, 1),
        Rational::new(minutes, 1),
        Rational::new(centiseconds, 100),
    ])
}

fn photo(i: u32) -> RawGpsMetadata {
    let lat_ref = if i % 2 == 0 { "N" } else { "S" };
    let lon_ref = if i % 3 == 0 { "E" } else { "W" };

    let mut metadata = RawGpsMetadata::new();
    metadata.insert("GPSLatitude", dms(i % 90, i % 60, i * 37 % 6000));
    metadata.insert("GPSLatitudeRef", TagValue::Text(lat_ref.to_string()));
    metadata.insert("GPSLongitude", dms(i % 180, i * 7 % 60, i * 53 % 6000));
    metadata.insert("GPSLongitudeRef", TagValue::Text(lon_ref.to_string()));
    metadata
}

fn bench(c: &mut Criterion) {
    let mapper = GeotagMapper::builder().build();
    let photos: Vec<_> = (0..10_000).map(photo).collect();

    c.bench_function("geotag_mapper.collect_from_metadata", |b| {
        b.iter(|| {
            mapper.collect_from_metadata(black_box(&photos)).unwrap();
        });
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
