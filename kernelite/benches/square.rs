use std::time::Instant;

use kernelite::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::StandardNormal;

type Dtype = f32;
const DIMS: [usize; 4] = [32, 64, 128, 256];

fn main() {
    println!("Benchmarking `square`");
    println!("Execution {}", kernelite::feature_flags::EXECUTION);
    println!("Dtype {}", std::any::type_name::<Dtype>());
    println!("Input shape {:?}", DIMS);
    println!();

    let dev: Cpu = Default::default();
    let ctx = Context::from(dev.clone());
    let registry = KernelRegistry::with_builtin();
    let key = |op| KernelKey::new(op, Target::Host, Precision::Float, Layout::NCHW);
    let fwd = registry.try_create(&key("square")).unwrap();
    let bwd = registry.try_create(&key("square_grad")).unwrap();

    let mut rng = StdRng::seed_from_u64(0);
    let numel: usize = DIMS.iter().product();
    let data: Vec<Dtype> = (0..numel).map(|_| rng.sample(StandardNormal)).collect();
    let x = dev.tensor_from_vec(data.clone(), DIMS);
    let out_grad = dev.tensor_from_vec(data, DIMS);
    let mut out = Tensor::new(DIMS);
    let mut x_grad = Tensor::new(DIMS);

    loop {
        let start = Instant::now();
        fwd.run(&ctx, &mut ActivationParams::new(&x, &mut out).into());
        let fwd_dur = start.elapsed();

        let start = Instant::now();
        bwd.run(
            &ctx,
            &mut ActivationGradParams::new(&x, &out, &out_grad, &mut x_grad).into(),
        );
        let bwd_dur = start.elapsed();
        println!("fwd={:?} bwd={:?}", fwd_dur, bwd_dur);
    }
}
