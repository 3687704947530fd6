fn main() {
    house_hisab::run_app();
}
