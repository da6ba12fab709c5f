mod soundness;
