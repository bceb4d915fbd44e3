use super::trivial_copy_n;
use crate::{
    common_cpu::Cpu,
    test_utils::{Call, Recorder},
    Category, DevPtr, HostPtr, MemcpyKind,
};
use half::f16;
use rand::Rng;

#[test]
fn test_host_to_device() {
    let src = (0..10).collect::<Vec<i32>>();
    let mut mirror = vec![0i32; 10];
    let dev = DevPtr::new(mirror.as_mut_ptr());

    unsafe { trivial_copy_n(&Cpu::default(), &src[..], src.len(), dev) }.unwrap();
    assert_eq!(mirror, (0..10).collect::<Vec<_>>());

    let recorder = Recorder::new(0);
    unsafe { trivial_copy_n(&recorder, &src[..], src.len(), dev) }.unwrap();
    assert_eq!(
        recorder.calls(),
        [Call {
            dst: mirror.as_ptr() as _,
            src: src.as_ptr() as _,
            count: 40,
            kind: MemcpyKind::HostToDevice,
        }]
    );
}

#[test]
fn test_device_to_host() {
    let mut rng = rand::thread_rng();
    let mut mirror = (0..257).map(|_| rng.gen::<f32>()).collect::<Vec<_>>();
    let dev = DevPtr::new(mirror.as_mut_ptr());
    let mut host = vec![0f32; mirror.len()];

    let recorder = Recorder::copying();
    unsafe { trivial_copy_n(&recorder, dev, mirror.len(), &mut host[..]) }.unwrap();
    assert_eq!(host, mirror);

    let calls = recorder.calls();
    let [call] = calls[..] else {
        panic!("expected exactly one call")
    };
    assert_eq!(call.kind, MemcpyKind::DeviceToHost);
    assert_eq!(call.count, 257 * 4);
}

#[test]
fn test_zero_length() {
    let mut a = [0u8; 4];
    let mut b = [0u8; 4];
    let src = DevPtr::new(a.as_mut_ptr());
    let dst = DevPtr::new(b.as_mut_ptr());

    let recorder = Recorder::new(0);
    unsafe { trivial_copy_n(&recorder, src, 0, dst) }.unwrap();
    assert_eq!(
        recorder.calls(),
        [Call {
            dst: b.as_ptr() as _,
            src: a.as_ptr() as _,
            count: 0,
            kind: MemcpyKind::DeviceToDevice,
        }]
    );
}

#[test]
fn test_failure() {
    let src = [1u64, 2, 3];
    let mut mirror = [0u64; 3];
    let dev = DevPtr::new(mirror.as_mut_ptr());

    for code in [1, 700, 999, -1] {
        let recorder = Recorder::new(code);
        let e = unsafe { trivial_copy_n(&recorder, &src[..], src.len(), dev) }.unwrap_err();
        assert_eq!(e.code, code);
        assert_eq!(e.category, Category::AcceleratorRuntime);
        assert_eq!(recorder.calls().len(), 1);
    }
    assert_eq!(mirror, [0; 3]);
}

#[test]
fn test_invalid_address() {
    let src = [0u16; 8];
    let e = unsafe { trivial_copy_n(&Cpu::default(), &src[..], 8, DevPtr::<u16>::null()) }
        .unwrap_err();
    assert_eq!(e.code, crate::common_cpu::INVALID_VALUE);
    assert_eq!(e.message(), "invalid argument");
}

#[test]
fn test_byte_count() {
    #[allow(dead_code)]
    #[derive(Clone, Copy)]
    #[repr(C)]
    struct Triple {
        a: u32,
        b: f32,
        c: u16,
    }

    let recorder = Recorder::new(0);
    let halves = [f16::ZERO; 7];
    let words = [0u64; 3];
    let triples = [Triple { a: 0, b: 0., c: 0 }; 5];
    unsafe {
        trivial_copy_n(&recorder, &halves[..], 7, DevPtr::<f16>::null()).unwrap();
        trivial_copy_n(&recorder, &words[..], 3, DevPtr::<u64>::null()).unwrap();
        trivial_copy_n(&recorder, &triples[..], 5, DevPtr::<Triple>::null()).unwrap();
    }
    let counts = recorder
        .calls()
        .into_iter()
        .map(|c| c.count)
        .collect::<Vec<_>>();
    assert_eq!(counts, [14, 24, 60]);
}

#[test]
fn test_wrapped_host() {
    let mut src = [3i8, 1, 4, 1, 5];
    let mut mirror = [0i8; 5];
    let host = HostPtr::from(&mut src[..]);
    let dev = DevPtr::new(mirror.as_mut_ptr());

    unsafe { trivial_copy_n(&Cpu::default(), host, 5, dev) }.unwrap();
    assert_eq!(mirror, src);

    // 裸指针同样属于主存
    let mut back = [0i8; 5];
    unsafe { trivial_copy_n(&Cpu::default(), dev, 5, back.as_mut_ptr()) }.unwrap();
    assert_eq!(back, src);
}

#[test]
fn test_shared_across_threads() {
    use rayon::iter::{IntoParallelIterator, ParallelIterator};

    let recorder = Recorder::copying();
    let src = (0..64).collect::<Vec<u32>>();
    let mirrors = (0..8)
        .into_par_iter()
        .map(|i| {
            let mut mirror = vec![0u32; 8];
            let dev = DevPtr::new(mirror.as_mut_ptr());
            unsafe { trivial_copy_n(&recorder, &src[i * 8..][..8], 8, dev) }.unwrap();
            mirror
        })
        .collect::<Vec<_>>();

    assert_eq!(mirrors.concat(), src);
    let calls = recorder.calls();
    assert_eq!(calls.len(), 8);
    assert!(calls
        .iter()
        .all(|c| c.kind == MemcpyKind::HostToDevice && c.count == 32));
}
