use criterion::{Criterion, black_box, criterion_group, criterion_main};
use urlparam::{Config, Encoding, Values};

#[derive(Debug, Clone, Default)]
struct SimpleStruct {
    id: u32,
    name: String,
    active: bool,
}

urlparam::impl_record! {
    SimpleStruct {
        id: u32,
        name: String,
        active: bool,
    }
}

#[derive(Debug, Clone, Default)]
#[allow(non_snake_case)]
struct UserReportParams {
    BusiType: i32,
    UID: String,
    AdposType: i32,
    ActionType: i32,
    FeedsIndex: u32,
    AdposID: String,
    Score: f64,
    Verbose: bool,
}

urlparam::impl_record! {
    UserReportParams {
        #[json = "busi_type,omitempty"]
        BusiType: i32,
        #[json = "uid"]
        UID: String,
        #[json = "adpos_type"]
        AdposType: i32,
        ActionType: i32,
        #[json = "feeds_index"]
        FeedsIndex: u32,
        #[json = "-"]
        AdposID: String,
        #[json = "score"]
        Score: f64,
        #[json = "verbose"]
        Verbose: bool,
    }
}

fn report() -> UserReportParams {
    UserReportParams {
        BusiType: 1,
        UID: "user 2222 & co".to_string(),
        AdposType: 555,
        ActionType: -666,
        FeedsIndex: 7777,
        AdposID: "aaaaa".to_string(),
        Score: 0.875,
        Verbose: true,
    }
}

fn encode_simple_struct(c: &mut Criterion) {
    let data = SimpleStruct {
        id: 42,
        name: "test_user".to_string(),
        active: true,
    };

    c.bench_function("encode_simple_struct", |b| {
        b.iter(|| urlparam::encode(black_box(&data)).unwrap())
    });
}

fn marshal_simple_struct(c: &mut Criterion) {
    let data = SimpleStruct {
        id: 42,
        name: "test_user".to_string(),
        active: true,
    };

    c.bench_function("marshal_simple_struct", |b| {
        b.iter(|| urlparam::marshal(black_box(&data)).unwrap())
    });
}

fn marshal_report(c: &mut Criterion) {
    let data = report();
    let query_config = Config::new().encoding(Encoding::Query);

    c.bench_function("marshal_report_form", |b| {
        b.iter(|| urlparam::marshal(black_box(&data)).unwrap())
    });
    c.bench_function("marshal_report_query", |b| {
        b.iter(|| query_config.marshal(black_box(&data)).unwrap())
    });
}

fn unmarshal_simple_struct(c: &mut Criterion) {
    let query = "id=42&name=test_user&active=true";

    c.bench_function("unmarshal_simple_struct", |b| {
        b.iter(|| {
            let _: SimpleStruct = urlparam::from_str(black_box(query)).unwrap();
        })
    });
}

fn unmarshal_report(c: &mut Criterion) {
    let query = urlparam::marshal(&report()).unwrap();

    c.bench_function("unmarshal_report", |b| {
        b.iter(|| {
            let mut params = UserReportParams::default();
            urlparam::unmarshal(black_box(&query), &mut params).unwrap();
            params
        })
    });
}

fn unmarshal_lenient_fallback(c: &mut Criterion) {
    let query = "busi_type=x&uid=&adpos_type=1e3&ActionType=--1&feeds_index=-1&score=nan%3F&verbose=maybe";

    c.bench_function("unmarshal_lenient_fallback", |b| {
        b.iter(|| {
            let _: UserReportParams = urlparam::from_str(black_box(query)).unwrap();
        })
    });
}

fn decode_prepared_values(c: &mut Criterion) {
    let values = urlparam::encode(&report()).unwrap();

    c.bench_function("decode_prepared_values", |b| {
        b.iter(|| {
            let mut params = UserReportParams::default();
            urlparam::decode(black_box(&values), &mut params).unwrap();
            params
        })
    });
}

fn parse_large_query(c: &mut Criterion) {
    // key0=0&key1=1&...&key99=99
    let query = (0..100)
        .map(|i| format!("key{}={}", i, i))
        .collect::<Vec<_>>()
        .join("&");

    c.bench_function("parse_large_query", |b| {
        b.iter(|| {
            let _: Values = urlparam::parse_query(black_box(&query)).unwrap();
        })
    });
}

criterion_group!(
    encode,
    encode_simple_struct,
    marshal_simple_struct,
    marshal_report
);

criterion_group!(
    decode,
    unmarshal_simple_struct,
    unmarshal_report,
    unmarshal_lenient_fallback,
    decode_prepared_values,
    parse_large_query
);

criterion_main!(encode, decode);
