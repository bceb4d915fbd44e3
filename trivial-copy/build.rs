fn main() {
    use build_script_cfg::Cfg;

    let cpu = Cfg::new("use_cpu");
    let cuda = Cfg::new("use_cuda");
    if cfg!(feature = "common-cpu") {
        cpu.define();
    }
    if cfg!(feature = "nvidia-gpu") {
        cuda.define();
    }
}
