use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use skillsync::{
    matcher_from_config, CandidateProfile, MatchConfig, RequesterProfile, Role, SkillSyncConfig,
};

const SKILL_NAMES: &[&str] = &[
    "Python",
    "SQL",
    "Rust",
    "Go",
    "Kubernetes",
    "Leadership",
    "Public Speaking",
    "Machine Learning",
    "Data Analysis",
    "Terraform",
];

const EXPERIENCE_LEVELS: &[&str] = &["beginner", "junior", "intermediate", "senior", "expert"];

fn build_pool(count: usize) -> Vec<CandidateProfile> {
    (0..count)
        .map(|i| CandidateProfile {
            id: format!("candidate-{i}"),
            skills: (0..4)
                .map(|j| SKILL_NAMES[(i * 3 + j) % SKILL_NAMES.len()].to_string())
                .collect(),
            experience: EXPERIENCE_LEVELS[i % EXPERIENCE_LEVELS.len()].to_string(),
        })
        .collect()
}

fn build_requester() -> RequesterProfile {
    RequesterProfile {
        id: "bench-requester".into(),
        skills: vec!["Python".into(), "SQL".into(), "Machine Learning".into()],
        experience: "intermediate".into(),
        role: Role::MenteeSeeking,
    }
}

fn bench_rank_scale(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_scale");
    let config = SkillSyncConfig::default();
    let engine = matcher_from_config(&config).expect("engine");
    let requester = build_requester();

    for size in [10usize, 100, 1000] {
        let pool = build_pool(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_function(format!("pool_{size}"), |b| {
            b.iter(|| {
                let _ = engine
                    .rank(black_box(&requester), black_box(&pool))
                    .expect("rank");
            });
        });
    }

    group.finish();
}

fn bench_rank_parallelism(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_parallelism");
    let requester = build_requester();
    let pool = build_pool(1000);

    for parallel in [false, true] {
        let config = SkillSyncConfig {
            matcher: MatchConfig {
                parallel,
                ..Default::default()
            },
            ..Default::default()
        };
        let engine = matcher_from_config(&config).expect("engine");
        let label = if parallel { "parallel" } else { "serial" };
        group.bench_function(label, |b| {
            b.iter(|| {
                let _ = engine
                    .rank(black_box(&requester), black_box(&pool))
                    .expect("rank");
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank_scale, bench_rank_parallelism);
criterion_main!(benches);
