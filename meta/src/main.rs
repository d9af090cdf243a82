fn main() {
    multiversx_sc_meta_lib::cli_main::<operator_nft::AbiProvider>();
}
