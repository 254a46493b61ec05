#![allow(missing_docs)]

use criterion::{Criterion, criterion_group, criterion_main};
use formstream::MultipartParser;

fn benchmark_single_file_upload(c: &mut Criterion) {
    let body = build_body(256 * 1024);

    c.bench_function("parse_256kb_file_single_chunk", |b| {
        b.iter(|| {
            let mut parser = MultipartParser::new("BOUND").expect("boundary should be valid");
            parser.parse(&body).expect("parse should succeed");
            let part = parser.next_part().expect("one part expected");
            assert_eq!(part.data().len(), 256 * 1024);
        });
    });
}

fn benchmark_chunked_upload(c: &mut Criterion) {
    let body = build_body(256 * 1024);

    c.bench_function("parse_256kb_file_4kb_chunks", |b| {
        b.iter(|| {
            let mut parser = MultipartParser::new("BOUND").expect("boundary should be valid");
            for chunk in body.chunks(4096) {
                parser.parse(chunk).expect("parse should succeed");
            }
            let part = parser.next_part().expect("one part expected");
            assert_eq!(part.data().len(), 256 * 1024);
        });
    });
}

fn build_body(size: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(size + 256);
    out.extend_from_slice(
        b"--BOUND\r\ncontent-disposition: form-data; name=\"upload\"; filename=\"bench.bin\"\r\n\r\n",
    );
    out.extend(std::iter::repeat(b'x').take(size));
    out.extend_from_slice(b"\r\n--BOUND--\r\n");
    out
}

criterion_group!(benches, benchmark_single_file_upload, benchmark_chunked_upload);
criterion_main!(benches);
