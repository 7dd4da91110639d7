use crate::config::SphereConfig;
use crate::plot::Plotter;
use crate::semantics::Dimension;

const SENTENCES: [&str; 2] = ["atom became star", "friend team society know"];

#[test]
fn test_empty_triple_list_means_every_view() {
    let plotter = Plotter::new(SphereConfig::default()).unwrap();
    let views = plotter.plot_axis_views(&SENTENCES, &[]);
    assert_eq!(views.len(), 20);
    assert_eq!(views[0].axes, [Dimension::Scale, Dimension::Temporal, Dimension::Agency]);
}

#[test]
fn test_scores_become_coordinates() {
    // Whole words, so the "i" marker doesn't pull every social word to -1
    let plotter = Plotter::new(SphereConfig::strict()).unwrap();
    let axes = [Dimension::Scale, Dimension::Social, Dimension::Sensory];
    let views = plotter.plot_axis_views(&SENTENCES, &[axes]);
    assert_eq!(views.len(), 1);

    let result = &views[0].result;
    assert_eq!(result.word("atom").unwrap().position, [-5.0, 0.0, 0.0]);
    assert_eq!(result.word("star").unwrap().position, [5.0, 0.0, 0.0]);
    assert_eq!(result.word("society").unwrap().position, [0.0, 5.0, 0.0]);
    assert_eq!(result.word("know").unwrap().position, [0.0, 0.0, 5.0]);
    assert_eq!(result.word("friend").unwrap().position, [0.0, -2.5, 0.0]);
    assert_eq!(result.word("team").unwrap().position, [0.0, 2.5, 0.0]);
    assert_eq!(result.stats.collisions, 0);
}

#[test]
fn test_substring_social_words_pile_up() {
    let plotter = Plotter::new(SphereConfig::default()).unwrap();
    let axes = [Dimension::Scale, Dimension::Social, Dimension::Sensory];
    let views = plotter.plot_axis_views(&["friend society"], &[axes]);

    let result = &views[0].result;
    assert_eq!(result.word("friend").unwrap().position, [0.0, -5.0, 0.0]);
    // Same raw point, so the second word is jittered off it
    assert_eq!(result.word("society").unwrap().collision_index, 1);
}

#[test]
fn test_each_view_resolves_collisions_independently() {
    let plotter = Plotter::new(SphereConfig::default()).unwrap();
    // Neither word scores on Temporal, Agency or Causality
    let axes = [Dimension::Temporal, Dimension::Agency, Dimension::Causality];
    let views = plotter.plot_axis_views(&["atom star"], &[axes, axes]);

    for view in &views {
        assert_eq!(view.result.word("atom").unwrap().position, [0.0, 0.0, 0.0]);
        assert_eq!(view.result.word("star").unwrap().collision_index, 1);
        assert_eq!(view.result.stats.collisions, 1);
    }
}

#[test]
fn test_view_radius_follows_axes_config() {
    let config = SphereConfig {
        strategy: crate::config::StrategyConfig::Axes {
            axes: [Dimension::Scale, Dimension::Temporal, Dimension::Agency],
            view_radius: 2.0,
        },
        ..SphereConfig::default()
    };
    let plotter = Plotter::new(config).unwrap();

    let direct = plotter.plot(&["atom star"]);
    assert_eq!(direct.word("star").unwrap().position, [2.0, 0.0, 0.0]);

    let views = plotter.plot_axis_views(&["atom star"], &[[Dimension::Scale, Dimension::Social, Dimension::Agency]]);
    assert_eq!(views[0].result.word("atom").unwrap().position, [-2.0, 0.0, 0.0]);
}
