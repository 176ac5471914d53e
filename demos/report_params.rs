use urlparam::Config;

#[derive(Debug, Default)]
#[allow(non_snake_case)]
struct UserReportParams {
    BusiType: i32,
    UID: String,
    AdposType: i32,
    ActionType: i32,
    FeedsIndex: u32,
    AdposID: String,
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
    }
}

fn main() {
    let params = UserReportParams {
        BusiType: 1,
        UID: "2222".to_string(),
        AdposType: 555,
        ActionType: -666,
        FeedsIndex: 7777,
        AdposID: "aaaaa".to_string(),
    };
    let q = urlparam::marshal(&params).unwrap();
    println!("{}", q);

    let mut decoded = UserReportParams::default();
    urlparam::unmarshal(&q, &mut decoded).unwrap();
    println!("{:?}", decoded);

    // text that is not a number decodes to zero unless strict
    let lenient: UserReportParams = urlparam::from_str("busi_type=abc&uid=7").unwrap();
    println!("{:?}", lenient);
    let strict = Config::new().strict(true).deserialize_str::<UserReportParams>("busi_type=abc");
    println!("{:?}", strict.map_err(|e| e.to_string()));
}
