/// Every graph representation should pass the same battery of tests against a naive
/// reference model. Invoke with the name of the generated test module, the graph type and
/// the list of traits to check.
macro_rules! test_graph_ops {
    ($env:ident, $graph:ident, ($($trait:ident),*)) => {
        #[cfg(test)]
        mod $env {
            use crate::{prelude::*, testing::*};
            use fxhash::FxHashSet;
            use itertools::Itertools;
            use rand::{Rng, SeedableRng};
            use rand_pcg::Pcg64Mcg;

            /// Creates a list of at most `m_ub` random edges for nodes `0..n`, possibly with repeats
            fn random_edges<R: Rng>(rng: &mut R, n: NumNodes, m_ub: NumEdges) -> Vec<Edge> {
                (0..m_ub)
                    .map(|_| Edge(rng.random_range(0..n), rng.random_range(0..n)))
                    .collect_vec()
            }

            $(
                test_graph_ops!($graph: $trait);
            )*
        }
    };
    ($graph:ident: GraphFromLabels) => {
        #[test]
        fn graph_from_labels() {
            for n in 0..50 {
                for graph_type in [GraphType::Directed, GraphType::Undirected] {
                    let graph = <$graph>::from_labels(graph_type, labels(n)).unwrap();

                    assert_eq!(graph.number_of_edges(), 0);
                    assert_eq!(graph.number_of_nodes(), n);
                    assert_eq!(graph.graph_type(), graph_type);

                    assert_eq!(graph.vertices().collect_vec(), (0..n).collect_vec());
                    assert_eq!(graph.labels().collect_vec(), labels(n).collect_vec());
                    for (u, label) in labels(n).enumerate() {
                        assert_eq!(graph.node_of(label), Some(u as Node));
                    }
                }
            }

            assert!(matches!(
                <$graph>::from_labels(GraphType::Directed, "ABCB".chars()),
                Err(GraphError::InvalidArgument { .. })
            ));
        }
    };
    ($graph:ident: AdjacencyList) => {
        #[test]
        fn test_adjacency_list() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                for m_ub in [n * 2, n * 5, n * 10] {
                    for _ in 0..10 {
                        let edges = random_edges(rng, n, m_ub as NumEdges);
                        let reference: FxHashSet<Edge> = edges.iter().copied().collect();

                        let mut graph = <$graph>::from_labels(GraphType::Directed, labels(n)).unwrap();
                        graph.try_add_edges(edges.iter().copied()).unwrap();

                        assert_eq!(graph.number_of_nodes(), n);
                        assert_eq!(graph.number_of_edges() as usize, reference.len());
                        assert_eq!(
                            graph.ordered_edges().collect_vec(),
                            reference.iter().copied().sorted().collect_vec()
                        );

                        let mut in_degs = vec![0 as NumNodes; n as usize];
                        for u in 0..n {
                            let neighbors = graph.neighbors_of(u).collect_vec();
                            assert_eq!(graph.degree_of(u) as usize, neighbors.len());
                            assert!(neighbors.iter().all_unique());

                            for v in 0..n {
                                assert_eq!(graph.has_edge(u, v), reference.contains(&Edge(u, v)));
                            }
                            for &v in &neighbors {
                                in_degs[v as usize] += 1;
                            }
                        }
                        assert_eq!(graph.in_degrees().unwrap(), in_degs);
                    }
                }
            }
        }
    };
    ($graph:ident: GraphEdgeEditing) => {
        #[test]
        fn test_graph_edge_editing() {
            let rng = &mut Pcg64Mcg::seed_from_u64(3);

            for n in [10 as NumNodes, 20, 50] {
                let mut graph = <$graph>::from_labels(GraphType::Directed, labels(n)).unwrap();
                let mut reference = FxHashSet::default();

                for Edge(u, v) in random_edges(rng, n, 5 * n) {
                    let existed = graph.try_add_edge(u, v).unwrap();
                    assert_eq!(existed, !reference.insert(Edge(u, v)));
                    assert_eq!(graph.number_of_edges() as usize, reference.len());
                }

                let (a, b) = (graph.label_of(0), graph.label_of(1));
                let expected = if graph.has_edge(0, 1) {
                    EdgeInsertion::AlreadyPresent
                } else {
                    EdgeInsertion::Inserted
                };
                assert_eq!(graph.add_labelled_edge(a, b).unwrap(), expected);
                assert_eq!(graph.add_labelled_edge(a, b).unwrap(), EdgeInsertion::AlreadyPresent);
                assert_eq!(graph.add_labelled_edge(a, '\0').unwrap(), EdgeInsertion::UnknownLabel);
            }
        }
    };
}

pub(crate) use test_graph_ops;

#[cfg(test)]
pub(crate) use helpers::*;
