fn main() {
    multiversx_sc_meta_lib::cli_main::<candy_issuance::AbiProvider>();
}
