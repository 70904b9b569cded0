fn main() {
    multiversx_sc_meta_lib::cli_main::<mock_price_feed::AbiProvider>();
}
