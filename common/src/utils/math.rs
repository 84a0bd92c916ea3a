use rand::Rng;

pub fn gen_random_verify_code() -> u32 {
    rand::random::<u32>() % 900000 + 100000
}

pub fn random_num() -> u64 {
    let mut rng = rand::thread_rng();
    rng.gen::<u64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gen_random_verify_code() {
        for _ in 0..100 {
            let code = gen_random_verify_code();
            assert!((100000..1000000).contains(&code));
        }
    }
}
